mod birthday_tests;
mod health_tests;
mod network_tests;
mod promotion_tests;
