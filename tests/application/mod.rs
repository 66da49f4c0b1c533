mod script_ranker_test;
