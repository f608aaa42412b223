pub mod service_tests;
