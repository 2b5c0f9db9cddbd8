// End-to-end tests of the query client live in integration_tests.rs.
