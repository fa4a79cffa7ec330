mod operation_builder_tests;
