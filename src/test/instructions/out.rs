use super::*;

#[test]
fn writes_low_byte_to_output() {
    let (_, io) = run_ok(&[19, 72, 0], &[]);
    assert_eq!(io.output, vec![72]);
}

#[test]
fn writes_sequence_in_order() {
    let (_, io) = run_ok(&[19, 72, 19, 105, 0], &[]);
    assert_eq!(io.output, vec![72, 105]);
}

#[test]
fn only_the_low_byte_is_written() {
    let (_, io) = run_ok(&[19, 0x1FF, 0], &[]);
    assert_eq!(io.output, vec![0xFF]);
}
