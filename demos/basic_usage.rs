// ============================================================================
// Basic Usage Example
// ============================================================================

use bignum_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    // --- arbitrary-precision integers ------------------------------------
    let a: Number = "1000000000000000000".parse().unwrap();
    let b: Number = "999999999999999999".parse().unwrap();
    println!("{} - {} = {}", a, b, a.clone() - b.clone());

    // subtracting past zero promotes Cardinal to Integer automatically
    let negative = b - a;
    println!("promoted kind: {} = {}", negative.kind_name(), negative);

    // --- fixed-point decimals ---------------------------------------------
    let price: Number = "19.99".parse().unwrap();
    let total = price.clone() * Number::from(3u64);
    println!("{} * 3 = {}", price, total);

    let tenth: Number = "0.1".parse().unwrap();
    let fifth: Number = "0.2".parse().unwrap();
    println!("0.1 + 0.2 = {} (exactly)", tenth + fifth);

    // --- backend selection -------------------------------------------------
    let mut big: Cardinal = "123456789".repeat(30).parse().unwrap();
    println!("auto-selected backend: {}", big.backend_name());
    big.set_backend(BackendKind::Naive);
    println!("after hot-swap:        {}", big.backend_name());

    let square = big.checked_mul(&big).unwrap();
    println!("square has {} bits", square.bit_len());

    // --- base-N formatting -------------------------------------------------
    let value = Cardinal::from(0xdead_beefu64);
    println!("0xdeadbeef in base 16: {}", value.format(16, DEFAULT_ALPHABET));
    println!("0xdeadbeef in base 64: {}", value.format(64, DEFAULT_ALPHABET));

    // --- primality ---------------------------------------------------------
    let table = PrimeTable::default();
    let mersenne = Number::from(2_147_483_647u64);
    println!(
        "2^31 - 1 prime? QR: {}, MR: {}",
        table.is_prime_qr(&mersenne, 5).unwrap(),
        is_prime_mr(&mersenne, 10).unwrap()
    );

    let carmichael = Number::from(172_947_529u64);
    println!(
        "172947529 first factor: {}",
        table.first_factor(&carmichael).unwrap()
    );
}
