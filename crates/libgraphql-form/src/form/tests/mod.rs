mod argument_value_tests;
mod coerce_tests;
mod unflatten_tests;
mod validate_tests;
