mod toast_tests;
