//! Cross-module test scenarios exercising the whole cube list algebra.

/// **(internal)** Hand-picked covers with known minimisation and decision results.
mod _test_list_logic_basic;

/// **(internal)** Seeded random workloads checking the algebraic laws at scale.
mod _test_list_logic_fuzzing;
