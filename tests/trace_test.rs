//! Tests for the execution trace side channel.
//!
//! A trace sink observes one event per executed instruction and must not
//! change execution semantics.

use std::sync::{Arc, Mutex};

use cpu6502::{CPU, FlatMemory, TraceEvent, TraceSink};

/// Sink that records the rendered form of every event it sees.
struct Recorder {
    lines: Arc<Mutex<Vec<String>>>,
}

impl TraceSink for Recorder {
    fn trace(&mut self, event: &TraceEvent) {
        self.lines.lock().unwrap().push(event.to_string());
    }
}

/// Helper to create a CPU with `program` loaded at the default origin.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    CPU::new(memory)
}

#[test]
fn test_one_event_per_instruction() {
    // LDA #$42 ; STA $1234 ; BRK
    let mut cpu = setup_cpu(&[0xA9, 0x42, 0x8D, 0x34, 0x12, 0x00]);
    let lines = Arc::new(Mutex::new(Vec::new()));
    cpu.set_trace_sink(Box::new(Recorder { lines: Arc::clone(&lines) }));
    cpu.run().unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(
        *lines,
        vec![
            "PC: 0x0600, inst: 0xA9 LDA #$42".to_string(),
            "PC: 0x0602, inst: 0x8D STA $1234".to_string(),
            "PC: 0x0605, inst: 0x00 BRK".to_string(),
        ]
    );
}

#[test]
fn test_event_carries_decoded_fields() {
    let mut cpu = setup_cpu(&[0xA9, 0x42, 0x00]);
    let events = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&events);
    cpu.set_trace_sink(Box::new(move |event: &TraceEvent| {
        captured.lock().unwrap().push(*event);
    }));
    cpu.step().unwrap();

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].address, 0x0600);
    assert_eq!(events[0].opcode, 0xA9);
    assert_eq!(events[0].mnemonic, "LDA");
}

#[test]
fn test_clearing_the_sink_stops_events() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA, 0x00]);
    let lines = Arc::new(Mutex::new(Vec::new()));
    cpu.set_trace_sink(Box::new(Recorder { lines: Arc::clone(&lines) }));

    cpu.step().unwrap();
    cpu.clear_trace_sink();
    cpu.run().unwrap();

    assert_eq!(lines.lock().unwrap().len(), 1);
}

#[test]
fn test_tracing_does_not_change_execution() {
    let program = [0xA9, 0x50, 0x69, 0x50, 0x8D, 0x00, 0x20, 0x00];

    let mut traced = setup_cpu(&program);
    traced.set_trace_sink(Box::new(|_: &TraceEvent| {}));
    traced.run().unwrap();

    let mut plain = setup_cpu(&program);
    plain.run().unwrap();

    assert_eq!(traced.a(), plain.a());
    assert_eq!(traced.pc(), plain.pc());
    assert_eq!(traced.status(), plain.status());
}

#[test]
fn test_no_event_for_undefined_opcode() {
    let mut cpu = setup_cpu(&[0xEA, 0x02]);
    let lines = Arc::new(Mutex::new(Vec::new()));
    cpu.set_trace_sink(Box::new(Recorder { lines: Arc::clone(&lines) }));

    cpu.step().unwrap();
    assert!(cpu.step().is_err());

    // Only the NOP was decoded; the fetch failure produces no event.
    assert_eq!(lines.lock().unwrap().len(), 1);
}
