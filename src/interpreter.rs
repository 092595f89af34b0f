/// The evaluator module computes the value of an AST.
///
/// The evaluator traverses the AST, resolves names through the symbol table,
/// applies arithmetic and builtin functions, and rejects non-finite values.
///
/// # Responsibilities
/// - Evaluates AST nodes, left operand before right.
/// - Dispatches builtin function calls and checks their arity.
/// - Reports division by zero, overflow and unknown names.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces a lazy stream of tokens:
/// numbers, identifiers, operators, parentheses and commas.
///
/// # Responsibilities
/// - Converts the input into tokens with byte offsets.
/// - Lower-cases identifiers so names are case-insensitive.
/// - Reports unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes honoring precedence and
///   associativity.
/// - Classifies grammar violations and unbalanced parentheses.
pub mod parser;
/// The symbol table holding constants and user variables.
///
/// # Responsibilities
/// - Seeds the constants `pi` and `e`.
/// - Validates and stores user variables.
/// - Resolves names for the evaluator.
pub mod symbols;
