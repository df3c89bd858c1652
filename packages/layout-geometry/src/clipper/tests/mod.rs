mod clipper_tests;
mod scanbeam_tests;
mod t_edge_tests;
