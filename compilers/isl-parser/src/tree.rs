use isl_tree::{NodeId, ParseTree, TreeError};
use nom::{
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    error::{Error as NomError, ErrorKind},
    multi::{many0, many1},
    sequence::{delimited, preceded},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeSyntaxError {
    #[error("tree text is empty")]
    Empty,
    #[error("malformed bracketed tree at byte {offset}: {kind}")]
    Malformed { offset: usize, kind: String },
    #[error("bracketed tree nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error(transparent)]
    Structure(#[from] TreeError),
}

/// Borrowed shape of one bracketed tree before it is grown into an arena.
#[derive(Debug, Clone, PartialEq)]
enum Bracketed<'a> {
    Node(&'a str, Vec<Bracketed<'a>>),
    Word(&'a str),
}

/// Deepest bracket nesting accepted. Parser output for real sentences stays
/// far below this.
pub const MAX_DEPTH: usize = 256;

/// Labels and words: anything up to whitespace or a bracket.
fn atom(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace() || c == '(' || c == ')')(input)
}

fn node(input: &str, depth: usize) -> IResult<&str, Bracketed<'_>> {
    let (input, _) = char('(')(input)?;
    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(NomError::new(input, ErrorKind::TooLarge)));
    }
    let (input, _) = multispace0(input)?;
    // `( (S ...))` has an unlabeled outer bracket
    let (input, label) = opt(atom)(input)?;
    let (input, children) = many0(preceded(
        multispace0,
        alt((|i| node(i, depth + 1), map(atom, Bracketed::Word))),
    ))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, Bracketed::Node(label.unwrap_or(""), children)))
}

fn malformed(original: &str, err: nom::Err<nom::error::Error<&str>>) -> TreeSyntaxError {
    match err {
        nom::Err::Failure(e) if e.code == ErrorKind::TooLarge => {
            TreeSyntaxError::TooDeep { limit: MAX_DEPTH }
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => TreeSyntaxError::Malformed {
            offset: original.len() - e.input.len(),
            kind: format!("{:?}", e.code),
        },
        nom::Err::Incomplete(_) => TreeSyntaxError::Malformed {
            offset: original.len(),
            kind: "incomplete input".to_string(),
        },
    }
}

fn grow(tree: &mut ParseTree, parent: NodeId, shape: &Bracketed<'_>) -> Result<(), TreeError> {
    let mut stack = vec![(parent, shape)];
    while let Some((parent, shape)) = stack.pop() {
        match shape {
            Bracketed::Word(text) => {
                tree.push_leaf(parent, *text)?;
            }
            Bracketed::Node(label, children) => {
                let node = tree.push_node(parent, *label)?;
                stack.extend(children.iter().rev().map(|child| (node, child)));
            }
        }
    }
    Ok(())
}

fn build(shape: &Bracketed<'_>) -> Result<ParseTree, TreeSyntaxError> {
    match shape {
        Bracketed::Node(label, children) => {
            let mut tree = ParseTree::new(*label);
            let root = tree.root();
            for child in children {
                grow(&mut tree, root, child)?;
            }
            Ok(tree)
        }
        // `node` only ever yields a Node at the top level
        Bracketed::Word(_) => Err(TreeSyntaxError::Malformed { offset: 0, kind: "bare word".to_string() }),
    }
}

/// Read one Penn-style bracketed tree, e.g. CoreNLP's `parse` field:
/// `(ROOT (S (NP (PRP I)) (VP (VBP eat) (NP (NN rice)))))`.
pub fn parse_tree(input: &str) -> Result<ParseTree, TreeSyntaxError> {
    if input.trim().is_empty() {
        return Err(TreeSyntaxError::Empty);
    }
    let (_, shape) = all_consuming(delimited(multispace0, |i| node(i, 0), multispace0))(input)
        .map_err(|e| malformed(input, e))?;
    build(&shape)
}

/// Read a whitespace-separated sequence of bracketed trees, in order.
pub fn parse_forest(input: &str) -> Result<Vec<ParseTree>, TreeSyntaxError> {
    if input.trim().is_empty() {
        return Err(TreeSyntaxError::Empty);
    }
    let (_, shapes) = all_consuming(delimited(
        multispace0,
        many1(preceded(multispace0, |i| node(i, 0))),
        multispace0,
    ))(input)
    .map_err(|e| malformed(input, e))?;
    shapes.iter().map(build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORENLP_STYLE: &str = "(ROOT\n  (S\n    (NP (PRP I))\n    (VP (VBP eat)\n      (NP (NN rice)))))";

    #[test]
    fn test_reads_multiline_tree() {
        let tree = parse_tree(CORENLP_STYLE).unwrap();
        assert_eq!(tree.words(), vec!["I", "eat", "rice"]);
        assert_eq!(tree.to_string(), "(ROOT (S (NP (PRP I)) (VP (VBP eat) (NP (NN rice)))))");
    }

    #[test]
    fn test_rendering_reads_back() {
        let text = "(ROOT (SBARQ (WHNP (WP What)) (SQ (VBZ is) (NP (PRP$ your) (NN name))) (. ?)))";
        let tree = parse_tree(text).unwrap();
        assert_eq!(tree.to_string(), text);
        assert_eq!(tree.subtrees(|l| l == "PRP$").len(), 1);
    }

    #[test]
    fn test_unlabeled_outer_bracket() {
        let tree = parse_tree("( (S (NN rice)))").unwrap();
        assert_eq!(tree.label(tree.root()), Some(String::new()));
        assert_eq!(tree.words(), vec!["rice"]);
    }

    #[test]
    fn test_forest_keeps_order() {
        let forest = parse_forest("(ROOT (NP (NN one)))\n(ROOT (NP (NN two)))").unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].words(), vec!["one"]);
        assert_eq!(forest[1].words(), vec!["two"]);
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert_eq!(parse_tree("   ").unwrap_err(), TreeSyntaxError::Empty);
        assert!(matches!(parse_tree("(ROOT (S (NN rice))"), Err(TreeSyntaxError::Malformed { .. })));
        assert!(matches!(parse_tree("rice"), Err(TreeSyntaxError::Malformed { offset: 0, .. })));
        assert!(matches!(parse_tree("(A) (B)"), Err(TreeSyntaxError::Malformed { .. })));
    }

    fn nested(depth: usize) -> String {
        format!("{}x{}", "(NP ".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_rejects_runaway_nesting() {
        let limit = TreeSyntaxError::TooDeep { limit: MAX_DEPTH };
        assert_eq!(parse_tree(&nested(20_000)).unwrap_err(), limit);
        assert_eq!(parse_tree(&nested(MAX_DEPTH + 1)).unwrap_err(), limit);
        assert_eq!(parse_forest(&format!("(A x) {}", nested(20_000))).unwrap_err(), limit);
    }

    #[test]
    fn test_accepts_nesting_up_to_limit() {
        let tree = parse_tree(&nested(MAX_DEPTH)).unwrap();
        assert_eq!(tree.words(), vec!["x"]);
        assert_eq!(tree.to_string(), nested(MAX_DEPTH));
    }
}
