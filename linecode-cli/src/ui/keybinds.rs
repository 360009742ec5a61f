use std::{
    collections::HashMap,
    fs::File,
    io::{
        BufReader,
        BufWriter,
    },
    path::Path,
};

use crossterm::event::{
    KeyCode,
    KeyEvent,
    KeyEventKind,
    KeyModifiers,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Quit,
    NextScheme,
    PreviousScheme,
    DeleteBit,
    ClearInput,
    ToggleStrict,
    Generate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keybinds {
    #[serde(with = "serde_keybinds")]
    keybinds: HashMap<Keybind, Action>,
}

impl Keybinds {
    /// Action bound to the key event, if any. Key releases never trigger
    /// actions.
    pub fn get(&self, event: KeyEvent) -> Option<Action> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        self.keybinds
            .get(&Keybind {
                code: event.code,
                modifiers: event.modifiers,
            })
            .copied()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        tracing::debug!(path = %path.as_ref().display(), "Loading keybinds from file");
        Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        tracing::debug!(path = %path.as_ref().display(), "Writing keybinds to file");
        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), self)?;
        Ok(())
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            #[rustfmt::skip]
            keybinds: [
                (KeyCode::Esc.into(), Action::Quit),
                (Keybind::from('c').with_modifiers(KeyModifiers::CONTROL), Action::Quit),
                (KeyCode::Tab.into(), Action::NextScheme),
                (KeyCode::BackTab.into(), Action::PreviousScheme),
                (Keybind::from(KeyCode::BackTab).with_modifiers(KeyModifiers::SHIFT), Action::PreviousScheme),
                (KeyCode::Backspace.into(), Action::DeleteBit),
                (Keybind::from('u').with_modifiers(KeyModifiers::CONTROL), Action::ClearInput),
                (Keybind::from('s').with_modifiers(KeyModifiers::CONTROL), Action::ToggleStrict),
                (KeyCode::Enter.into(), Action::Generate),
            ]
                .into_iter()
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Keybind {
    #[serde(rename = "key")]
    code: KeyCode,
    #[serde(
        skip_serializing_if = "KeyModifiers::is_empty",
        default = "KeyModifiers::empty"
    )]
    modifiers: KeyModifiers,
}

impl Keybind {
    fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }
}

impl From<KeyCode> for Keybind {
    fn from(value: KeyCode) -> Self {
        Self {
            code: value,
            modifiers: KeyModifiers::empty(),
        }
    }
}

impl From<char> for Keybind {
    fn from(value: char) -> Self {
        Self::from(KeyCode::Char(value))
    }
}

mod serde_keybinds {
    use std::fmt;

    use serde::{
        Deserializer,
        Serializer,
        de::Visitor,
        ser::SerializeSeq,
    };

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Pair<K, A> {
        #[serde(flatten)]
        keybind: K,
        action: A,
    }

    pub fn serialize<S>(
        keybinds: &HashMap<Keybind, Action>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(keybinds.len()))?;
        for (keybind, action) in keybinds {
            seq.serialize_element(&Pair { keybind, action })?;
        }
        seq.end()
    }

    struct KeybindsVisitor;

    impl<'de> Visitor<'de> for KeybindsVisitor {
        type Value = HashMap<Keybind, Action>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of keybinds")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut keybinds = HashMap::with_capacity(seq.size_hint().unwrap_or_default());

            while let Some(pair) = seq.next_element::<Pair<Keybind, Action>>()? {
                keybinds.insert(pair.keybind, pair.action);
            }

            Ok(keybinds)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<Keybind, Action>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(KeybindsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        KeyCode,
        KeyEvent,
        KeyEventKind,
        KeyEventState,
        KeyModifiers,
    };

    use crate::ui::keybinds::{
        Action,
        Keybinds,
    };

    #[test]
    fn digits_are_not_bound() {
        let keybinds = Keybinds::default();
        for c in ['0', '1'] {
            assert_eq!(
                keybinds.get(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                None
            );
        }
    }

    #[test]
    fn modifiers_must_match() {
        let keybinds = Keybinds::default();
        assert_eq!(
            keybinds.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            keybinds.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn releases_are_ignored() {
        let keybinds = Keybinds::default();
        let release = KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(keybinds.get(release), None);
    }

    #[test]
    fn keybinds_file_format_is_a_list_of_pairs() {
        let keybinds: Keybinds = serde_json::from_str(
            r#"[{ "key": "Tab", "action": "previous-scheme" }]"#,
        )
        .unwrap();
        assert_eq!(
            keybinds.get(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::PreviousScheme)
        );
        assert_eq!(
            keybinds.get(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn default_keybinds_are_written_as_a_list() {
        let json = serde_json::to_value(Keybinds::default()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(9));

        let keybinds: Keybinds = serde_json::from_value(json).unwrap();
        assert_eq!(
            keybinds.get(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Action::ToggleStrict)
        );
    }
}
