// FILE: src/fixtures.rs

/// Built-in sample texts for a few well-known identifiers
const FIXTURES: &[(&str, &str)] = &[
    ("9780141439518", PRIDE_AND_PREJUDICE),
    ("9780743273565", THE_GREAT_GATSBY),
    ("9780451524935", NINETEEN_EIGHTY_FOUR),
    ("9780143121908", THE_CATCHER_IN_THE_RYE),
];

const PRIDE_AND_PREJUDICE: &str = "PRIDE AND PREJUDICE

By Jane Austen

Chapter I

It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife.

However little known the feelings or views of such a man may be on his first entering a neighbourhood, this truth is so well fixed in the minds of the surrounding families, that he is considered the rightful property of some one or other of their daughters.

\"My dear Mr. Bennet,\" said his lady to him one day, \"have you heard that Netherfield Park is let at last?\"

Mr. Bennet replied that he had not.

\"But it is,\" returned she; \"for Mrs. Long has just been here, and she told me all about it.\"

Mr. Bennet made no answer.

\"Do you not want to know who has taken it?\" cried his wife impatiently.

\"You want to tell me, and I have no objection to hearing it.\"

This was invitation enough.";

const THE_GREAT_GATSBY: &str = "THE GREAT GATSBY

By F. Scott Fitzgerald

Chapter I

In my younger and more vulnerable years my father gave me some advice that I've been turning over in my mind ever since.

\"Whenever you feel like criticizing any one,\" he told me, \"just remember that all the people in this world haven't had the advantages that you've had.\"

He didn't say any more, but we've always been unusually communicative in a reserved way, and I understood that he meant a great deal more than that.";

const NINETEEN_EIGHTY_FOUR: &str = "1984

By George Orwell

A full-text edition of this title is not bundled. This sample entry lets the reader be exercised end to end without network access.";

const THE_CATCHER_IN_THE_RYE: &str = "THE CATCHER IN THE RYE

By J. D. Salinger

A full-text edition of this title is not bundled. This sample entry lets the reader be exercised end to end without network access.";

/// Fixed table of sample texts consulted after the curated catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureTable {
    entries: &'static [(&'static str, &'static str)],
}

impl FixtureTable {
    pub fn builtin() -> Self {
        Self { entries: FIXTURES }
    }

    /// A table with no entries
    pub fn empty() -> Self {
        Self { entries: &[] }
    }

    /// Finds a sample text for an identifier
    ///
    /// An entry matches when it occurs in the identifier, or when it starts
    /// with the identifier's last four characters (the whole identifier if
    /// shorter). Entries are checked in table order.
    pub fn lookup(&self, identifier: &str) -> Option<&'static str> {
        let chars: Vec<char> = identifier.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();

        self.entries
            .iter()
            .find(|(key, _)| identifier.contains(key) || key.starts_with(tail.as_str()))
            .map(|(_, text)| *text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
