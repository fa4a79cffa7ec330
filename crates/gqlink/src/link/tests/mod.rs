mod auth_link_tests;
