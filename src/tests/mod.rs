mod field_tests;
