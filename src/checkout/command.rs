pub mod checkout_cart_cmd;
