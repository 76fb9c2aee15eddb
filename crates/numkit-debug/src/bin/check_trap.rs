//! Test helper: triggers the failing check named by the first CLI
//! argument, so the trap path can be observed from another process.

use numkit_debug::{check, expect_eq, expect_non_null};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_default();
    match mode.as_str() {
        "check" => {
            let value = 41;
            check!(value == 42);
        }
        "check-msg" => {
            check!(1 + 1 == 3, "arithmetic is broken");
        }
        "expect-eq-f64" => {
            let measured = 0.1_f64 + 0.2_f64;
            expect_eq!(measured, 0.4_f64);
        }
        "non-null" => {
            let missing: Option<u32> = None;
            expect_non_null!(missing);
        }
        _ => {}
    }
    println!("reached the end");
}
