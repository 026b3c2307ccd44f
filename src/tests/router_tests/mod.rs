mod page_tests;
mod prediction_tests;
