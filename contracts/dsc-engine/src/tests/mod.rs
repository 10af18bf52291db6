
mod burn_test;
mod mint_test;
mod redeem_test;
mod views_test;
