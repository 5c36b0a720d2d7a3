//! Scalar numerics: stable summation, quadratic roots, Newton–Raphson
//! refinement, low-degree polynomials and Simpson integration.

mod integrate;
mod newton;
mod polynomial;
mod quadratic;
mod sum;

pub use integrate::{integrate, Integral, Sample, SimpsonIntegrator};
pub use newton::{number_equals, NewtonRaphson, MACHINE_EPSILON};
pub use polynomial::{det2, det3, Polynomial};
pub use quadratic::{solve_quadratic, QuadraticEquation};
pub use sum::{kahan_sum, naive_sum, stable_sum, KahanSum, SumAlgorithm};
