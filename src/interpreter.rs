/// The converter module reorders infix tokens into postfix order.
///
/// It implements the Shunting Yard algorithm: operators are ordered by their
/// registered priorities, brackets group sub-expressions and function calls,
/// and commas separate function arguments.
///
/// # Responsibilities
/// - Applies operator priorities with left associativity.
/// - Attaches every function after its arguments.
/// - Reports unpaired brackets and unknown operators.
pub mod converter;
/// The evaluator module computes the value of an expression.
///
/// It owns the registry of operators and functions, drives the whole
/// pipeline and runs the postfix stack machine.
///
/// # Responsibilities
/// - Keeps tokenizer, converter and implementations in sync on registration.
/// - Pushes atoms, invokes operators and functions on the value stack.
/// - Checks that exactly one value is left at the end.
pub mod evaluator;
/// The lexer module performs the initial split of an expression.
///
/// It separates quoted segments, brackets, commas and whitespace-delimited
/// chunks, and asks its caller what each chunk is.
pub mod lexer;
/// Tokens shared by all stages of the pipeline.
pub mod token;
/// The tokenizer module classifies the lexer's output.
///
/// It knows the registered operator and function names and splits chunks
/// such as `A+B` around operators that are not surrounded by whitespace.
pub mod tokenizer;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: null, string, boolean and datetime.
/// - Converts atoms into values and the final value into the result.
pub mod value;
