use super::*;

#[test]
fn greater_sets_one() {
    let (processor, _) = run_ok(&[5, 32768, 5, 3, 0], &[]);
    assert_eq!(processor.register(0), 1);
}

#[test]
fn not_greater_sets_zero() {
    let (processor, _) = run_ok(&[5, 32768, 3, 5, 0], &[]);
    assert_eq!(processor.register(0), 0);
}

#[test]
fn compares_unsigned() {
    // Large literal values (still < 32768) compare as plain unsigned words.
    let (processor, _) = run_ok(&[5, 32768, 32767, 1, 0], &[]);
    assert_eq!(processor.register(0), 1);
}
