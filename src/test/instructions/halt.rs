use super::*;

#[test]
fn stops_without_advancing_pc() {
    let (processor, io) = run_ok(&[0], &[]);
    assert_eq!(processor.state(), State::Halted);
    assert_eq!(processor.program_counter(), 0);
    assert!(io.output.is_empty());
}

#[test]
fn noop_then_halt_produces_no_output() {
    let (processor, io) = run_ok(&[21, 21, 0], &[]);
    assert_eq!(processor.state(), State::Halted);
    assert!(io.output.is_empty());
}
