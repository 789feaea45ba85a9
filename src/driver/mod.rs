pub mod tick_driver;
