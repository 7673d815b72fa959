use crate::vte_actions::VteAction::{
    CarriageReturn, CursorBackward, CursorDown, CursorForward, CursorUp, HideCursor, LineFeed,
    ShowCursor, Text,
};
use vte::{Params, Parser, Perform};

/// The semantic actions a status block burst can contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VteAction {
    Text(char),
    LineFeed,
    CarriageReturn,
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBackward(u16),
    HideCursor,
    ShowCursor,
}

/// A wrapper over [Parser] and [Perform] which takes bytes in and exposes the cursor
/// actions they encode, so tests can check what was emitted without string matching on
/// escape sequences.
pub struct VteActionParser {
    parser: Parser,
}

impl VteActionParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Vec<VteAction> {
        let mut performer = Performer::new();
        for byte in bytes {
            self.parser.advance(&mut performer, *byte)
        }
        performer.actions
    }
}

/// Parses a whole burst with a fresh parser.
pub fn parse(burst: &str) -> Vec<VteAction> {
    VteActionParser::new().parse_bytes(burst.as_bytes())
}

struct Performer {
    actions: Vec<VteAction>,
}

impl Performer {
    fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl Perform for Performer {
    fn print(&mut self, c: char) {
        self.actions.push(Text(c))
    }

    fn execute(&mut self, byte: u8) {
        let action = match byte {
            10 => LineFeed,
            13 => CarriageReturn,
            _ => return,
        };
        self.actions.push(action);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, c: char) {
        let action = match (intermediates, c) {
            ([], 'A') => CursorUp(params.canonicalize_1(1)),
            ([], 'B') => CursorDown(params.canonicalize_1(1)),
            ([], 'C') => CursorForward(params.canonicalize_1(1)),
            ([], 'D') => CursorBackward(params.canonicalize_1(1)),
            ([b'?'], 'l') if params.canonicalize_1(0) == 25 => HideCursor,
            ([b'?'], 'h') if params.canonicalize_1(0) == 25 => ShowCursor,
            _ => return,
        };
        self.actions.push(action);
    }
}

trait ParamsCanonicalize {
    fn canonicalize_1(&self, default: u16) -> u16;
}

impl ParamsCanonicalize for Params {
    fn canonicalize_1(&self, default: u16) -> u16 {
        self.iter()
            .next()
            .and_then(|x| x.first().copied())
            .filter(|x| *x != 0)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod test {
    use crate::vte_actions::{parse, VteAction::*};

    #[test]
    fn decodes_movement_and_visibility() {
        assert_eq!(
            parse("\n\x1b[2A\x1b[?25l\x1b[3B\x1b[20Dx\x1b[?25h"),
            vec![
                LineFeed,
                CursorUp(2),
                HideCursor,
                CursorDown(3),
                CursorBackward(20),
                Text('x'),
                ShowCursor
            ]
        );
    }
}
