mod rational_tests;
mod ifd_tests;
mod builder_tests;
mod assembler_tests;
