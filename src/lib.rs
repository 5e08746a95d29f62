#![no_std]

#[cfg(test)] extern crate std;

pub mod distributions;
pub mod error;
pub mod seed;
pub mod xs1024;

pub use distributions::*;
pub use error::*;
pub use seed::*;
pub use xs1024::*;
pub use rand_core::*;

/// Number of 64-bit words in the Xs1024 state vector. The algorithm is defined for exactly 16.
pub const STATE_WORDS: usize = 16;

/// Output multiplier of xorshift1024*.
pub const XS1024_MULTIPLIER: u64 = 1181783497276652981;

/// Output multiplier of the xorshift64* seed expander.
pub const XORSHIFT64_MULTIPLIER: u64 = 2685821657736338717;

/// Default state, taken arbitrarily from the digits of pi.
pub const DEFAULT_STATE: [u64; STATE_WORDS] = [
    3141592653589793238,
    4626433832795028841,
    9716939937510582097,
    4944592307816406286,
    2089986280348253421,
    1706798214808651328,
    2306647093844609550,
    5822317253594081284,
    8111745028410270193,
    8521105559644622948,
    9549303819644288109,
    7566593344612847564,
    8233786783165271201,
    9091456485669234603,
    4861045432664821339,
    3607260249141273724,
];
