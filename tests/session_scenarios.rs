use std::io::Cursor;

use stackcalc::lang::tokenizing::Tokenizer;
use stackcalc::runtime::error::{ArithmeticFault, ScriptError};
use stackcalc::runtime::interpreter::virtual_machine::VirtualMachine;

/// Run one input unit the way the REPL does, clearing the tokenizer first.
fn run_line(
    vm: &mut VirtualMachine,
    tokenizer: &mut Tokenizer,
    line: &str,
) -> Result<(), ScriptError> {
    tokenizer.clear();
    tokenizer.process(line, None);
    vm.execute_tokens(tokenizer.tokens())
}

#[test]
fn tokens_of_a_scenario_are_executed_in_order() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.process("3 4 + 2 *", None);

    let texts: Vec<&str> = tokenizer.tokens().iter().map(|token| token.text()).collect();
    assert_eq!(texts, vec!["3", "4", "+", "2", "*"]);

    let mut vm = VirtualMachine::new();
    vm.execute_tokens(tokenizer.tokens()).unwrap();
    assert_eq!(vm.stack_state(), vec![14]);
}

#[test]
fn division_underflow_reports_required_and_present_counts() {
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();

    let result = run_line(&mut vm, &mut tokenizer, "1 /");

    match result {
        Err(ScriptError::StackUnderflow {
            word,
            required,
            have,
            location,
        }) => {
            assert_eq!(word, "/");
            assert_eq!(required, 2);
            assert_eq!(have, 1);
            assert_eq!(location.column(), 3);
        }
        other => panic!("Expected stack underflow, got {:?}", other),
    }

    assert_eq!(vm.stack_state(), vec![1]);
}

#[test]
fn session_continues_after_recoverable_faults() {
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();

    run_line(&mut vm, &mut tokenizer, "10 20").unwrap();

    let error = run_line(&mut vm, &mut tokenizer, "0 / 99").unwrap_err();
    assert!(error.is_recoverable());
    assert!(matches!(
        error,
        ScriptError::Arithmetic {
            fault: ArithmeticFault::DivisionByZero,
            ..
        }
    ));

    // The literal pushed before the fault stays, the one after it never ran.
    assert_eq!(vm.stack_state(), vec![10, 20, 0]);

    let error = run_line(&mut vm, &mut tokenizer, "drop bogus").unwrap_err();
    assert!(error.is_recoverable());
    assert_eq!(vm.stack_state(), vec![10, 20]);

    run_line(&mut vm, &mut tokenizer, "+").unwrap();
    assert_eq!(vm.stack_state(), vec![30]);
}

#[test]
fn stack_state_is_a_read_only_snapshot() {
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();

    run_line(&mut vm, &mut tokenizer, "1 2 3").unwrap();

    let mut first = vm.stack_state();
    let second = vm.stack_state();
    assert_eq!(first, second);

    first.clear();
    assert_eq!(vm.stack_state(), vec![1, 2, 3]);
}

#[test]
fn faults_in_streamed_scripts_carry_the_source_name() {
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();
    let script = Cursor::new("1 2 +\n\n  3 frob\n");

    tokenizer.process_stream(script, Some("calc.sc")).unwrap();
    let error = vm.execute_tokens(tokenizer.tokens()).unwrap_err();

    assert_eq!(error.to_string(), "calc.sc (3, 5): Unrecognized word 'frob'.");
    assert_eq!(vm.stack_state(), vec![3, 3]);
}

#[test]
fn multi_chunk_input_executes_as_one_unit() {
    let mut vm = VirtualMachine::new();
    let mut tokenizer = Tokenizer::new();

    tokenizer.process("6 7", None);
    tokenizer.process("*", None);
    vm.execute_tokens(tokenizer.tokens()).unwrap();

    assert_eq!(vm.stack_state(), vec![42]);
    assert_eq!(tokenizer.tokens()[2].location().line(), 2);
}
