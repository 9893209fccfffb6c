mod type_ref_tests;
