mod identifier_tests;
mod tree_tests;
