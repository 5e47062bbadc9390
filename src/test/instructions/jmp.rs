use super::*;

#[test]
fn jumps_over_unreachable_code() {
    // JMP 4; OUT 'X' (skipped); HALT
    let (processor, io) = run_ok(&[6, 4, 19, 88, 0], &[]);
    assert_eq!(processor.state(), State::Halted);
    assert!(io.output.is_empty());
}

#[test]
fn loops_bounded_by_max_ticks() {
    let mut processor = Processor::new(&[6, 0]);
    let mut io = crate::io::BufferIo::new(&[]);
    assert!(processor.run_bounded(&mut io, 1000).is_none());
}
