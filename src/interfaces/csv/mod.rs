pub mod country_reader;
