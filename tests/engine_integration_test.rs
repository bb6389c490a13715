use gcd_calc::{
    ConsolePrinter, ConsoleReader, GcdEngine, GcdError, OperandLabel, OutputFormat, PresetSource,
    ZeroPolicy,
};
use std::io::Cursor;

fn run_console(
    input: &str,
    format: OutputFormat,
    trace: bool,
    policy: ZeroPolicy,
) -> (Result<u64, GcdError>, String, String) {
    let reader = ConsoleReader::new(Cursor::new(input.to_string()), Vec::new());
    let printer = ConsolePrinter::new(Vec::new(), format, trace);
    let mut engine = GcdEngine::with_policy(reader, printer, policy);

    let result = engine.run().map(|outcome| outcome.result);
    let (reader, printer) = engine.into_parts();
    let (_, prompts) = reader.into_inner();

    (
        result,
        String::from_utf8(prompts).unwrap(),
        String::from_utf8(printer.into_inner()).unwrap(),
    )
}

#[test]
fn test_end_to_end_interactive_session() {
    let (result, prompts, output) =
        run_console("12\n8\n", OutputFormat::Text, false, ZeroPolicy::Preserve);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(
        prompts,
        "Enter the first number : \nEnter the second number : \n"
    );
    assert_eq!(output, "The gcf of the two numbers is : 1 \n");
}

#[test]
fn test_end_to_end_with_trace() {
    let (result, _, output) =
        run_console("5\n17\n", OutputFormat::Text, true, ZeroPolicy::Preserve);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(
        output,
        "gcd(17, 5)\ngcd(5, 2)\ngcd(2, 1)\ngcd(1, 0)\nThe gcf of the two numbers is : 1 \n"
    );
}

#[test]
fn test_end_to_end_euclid_json() {
    let (result, _, output) =
        run_console("-4\n8\n", OutputFormat::Json, false, ZeroPolicy::Euclid);

    assert_eq!(result.unwrap(), 4);

    let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(value["operands"]["first"], -4);
    assert_eq!(value["operands"]["second"], 8);
    assert_eq!(value["policy"], "euclid");
    assert_eq!(value["result"], 4);
    assert_eq!(value["steps"][0]["a"], 8);
    assert_eq!(value["steps"][0]["b"], -4);
}

#[test]
fn test_malformed_first_number_stops_before_second_prompt() {
    let (result, prompts, output) =
        run_console("abc\n8\n", OutputFormat::Text, false, ZeroPolicy::Preserve);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        GcdError::ParseError {
            label: OperandLabel::First,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(prompts, "Enter the first number : \n");
    assert!(output.is_empty());
}

#[test]
fn test_whitespace_separated_input_like_scanf() {
    let (result, prompts, output) =
        run_console("12 8\n", OutputFormat::Text, false, ZeroPolicy::Preserve);
    assert_eq!(result.unwrap(), 1);
    assert_eq!(
        prompts,
        "Enter the first number : \nEnter the second number : \n"
    );
    assert_eq!(output, "The gcf of the two numbers is : 1 \n");

    let (result, _, _) = run_console("\n12\n8\n", OutputFormat::Text, false, ZeroPolicy::Euclid);
    assert_eq!(result.unwrap(), 4);
}

#[test]
fn test_blank_and_missing_second_number() {
    let (result, _, output) =
        run_console("12\n\n", OutputFormat::Text, false, ZeroPolicy::Preserve);
    assert!(matches!(
        result,
        Err(GcdError::UnexpectedEof {
            label: OperandLabel::Second
        })
    ));
    assert!(output.is_empty());

    let (result, _, _) = run_console("12\n", OutputFormat::Text, false, ZeroPolicy::Preserve);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        GcdError::UnexpectedEof {
            label: OperandLabel::Second
        }
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_non_utf8_input_exits_as_bad_input() {
    let reader = ConsoleReader::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'8', b'\n']), Vec::new());
    let printer = ConsolePrinter::new(Vec::new(), OutputFormat::Text, false);
    let mut engine = GcdEngine::new(reader, printer);

    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        GcdError::InvalidEncoding {
            label: OperandLabel::First,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_preset_operands_skip_prompts() {
    let console = ConsoleReader::new(Cursor::new(String::new()), Vec::new());
    let source = PresetSource::new(Some(0), Some(5), console);
    let printer = ConsolePrinter::new(Vec::new(), OutputFormat::Text, false);
    let mut engine = GcdEngine::new(source, printer);

    let outcome = engine.run().unwrap();
    assert_eq!(outcome.result, 1);
    assert_eq!(outcome.policy, ZeroPolicy::Preserve);

    let (_, printer) = engine.into_parts();
    assert_eq!(
        String::from_utf8(printer.into_inner()).unwrap(),
        "The gcf of the two numbers is : 1 \n"
    );
}
