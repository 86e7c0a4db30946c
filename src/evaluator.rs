/// The lexer module tokenizes expression text for the scanner.
///
/// The lexer reads the whitespace-stripped expression and produces a stream
/// of tokens: greedy numeric literal captures and the four single-character
/// operators. Any other character surfaces as a lexing error, which the
/// scanner converts into a positioned format error.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Captures numeric literals greedily (digits and decimal points).
/// - Maps operator tokens onto the `Operator` enum.
pub mod lexer;
/// The reducer module collapses the token stream into a single value.
///
/// The reducer consumes the parallel number/operator sequences produced by
/// the scanner in two left-to-right passes: first all multiplications and
/// divisions are spliced in place, then the remaining additions and
/// subtractions are folded. Left-to-right order within a tier is preserved
/// exactly.
///
/// # Responsibilities
/// - Splices `*` and `/` results in place, keeping subsequent tokens in
///   order.
/// - Folds `+` and `-` strictly left to right.
/// - Reports division by zero before it is computed.
pub mod reducer;
/// The scanner module validates the expression grammar.
///
/// The scanner walks the token stream and enforces the alternating
/// number/operator shape, fusing a `-` onto the following literal when it
/// appears where a number is expected. It produces the two parallel
/// sequences the reducer consumes.
///
/// # Responsibilities
/// - Strips whitespace and rejects empty input.
/// - Alternates between number and operator states, with positioned errors.
/// - Guarantees `numbers.len() == operators.len() + 1` on success.
pub mod scanner;
