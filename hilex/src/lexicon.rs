use crate::*;

/// a named rule table, consulted in order during scanning
#[derive(Debug)]
pub struct State {
    pub(crate) name: &'static str,
    pub(crate) rules: Vec<Rule>,
}

/// a named, immutable collection of states, plus the metadata a registry
/// needs to find it
///
/// built once at load time, scanning never changes it. deriving a lexicon
/// from another one is plain table concatenation: [`Lexicon::based_on`]
/// keeps the base tables, [`Lexicon::prepend`] puts the override rules in
/// front of them
#[derive(Debug)]
pub struct Lexicon {
    name: &'static str,
    aliases: Vec<&'static str>,
    extensions: Vec<&'static str>,
    states: Vec<State>,
}

impl Lexicon {
    /// every scan starts in this state
    pub const ROOT: &'static str = "root";

    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            aliases: vec![],
            extensions: vec![],
            states: vec![],
        }
    }

    /// begin a new lexicon on top of this one's tables
    ///
    /// the base states stay as they are, the identity starts fresh
    pub fn based_on(self, name: &'static str) -> Self {
        Self {
            name,
            aliases: vec![],
            extensions: vec![],
            states: self.states,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn extension(mut self, extension: &'static str) -> Self {
        self.extensions.push(extension);
        self
    }

    pub fn state(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        if self.has_state(name) {
            panic!("lexicon `{}` defines state `{name}` twice", self.name);
        }
        self.states.push(State { name, rules });
        self
    }

    /// put a rule in front of an already defined state's table
    pub fn prepend(mut self, name: &'static str, rule: Rule) -> Self {
        let lexicon = self.name;
        let state = self
            .states
            .iter_mut()
            .find(|state| state.name == name)
            .unwrap_or_else(|| panic!("lexicon `{lexicon}` has no state `{name}`"));
        state.rules.insert(0, rule);
        self
    }

    /// check the finished tables: the root state exists and every push
    /// leads to a known state
    ///
    /// table bugs are programmer errors, so this panics instead of
    /// returning them
    pub fn finish(self) -> Self {
        if !self.has_state(Self::ROOT) {
            panic!("lexicon `{}` has no `{}` state", self.name, Self::ROOT);
        }
        for state in &self.states {
            for rule in &state.rules {
                if let Action::Push(target) = rule.action {
                    if !self.has_state(target) {
                        panic!(
                            "lexicon `{}`: state `{}` pushes into unknown state `{target}`",
                            self.name, state.name
                        );
                    }
                }
            }
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn aliases(&self) -> &[&'static str] {
        &self.aliases
    }

    pub fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }

    /// scan a source against this lexicon
    ///
    /// scanning never fails, unmatchable input degrades into error tokens
    pub fn scan(&self, source: &Source) -> Vec<Token> {
        Scanner::new(self, source).get_tokens()
    }

    /// scan a bare string, see [`Lexicon::scan`]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.scan(&Source::new("<string>", text))
    }

    fn has_state(&self, name: &str) -> bool {
        self.states.iter().any(|state| state.name == name)
    }

    pub(crate) fn get_state(&self, name: &str) -> &State {
        self.states
            .iter()
            .find(|state| state.name == name)
            .unwrap_or_else(|| panic!("lexicon `{}` has no state `{name}`", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Lexicon {
        Lexicon::new("Tiny")
            .state(
                Lexicon::ROOT,
                vec![Rule::token("[a-z]+", Category::Text)],
            )
            .finish()
    }

    #[test]
    fn based_on_keeps_tables() {
        let derived = tiny().based_on("Bigger").alias("big").finish();
        assert_eq!(derived.name(), "Bigger");
        assert_eq!(derived.aliases(), &["big"]);
        assert!(derived.has_state(Lexicon::ROOT));
    }

    #[test]
    fn prepend_goes_first() {
        let lexicon = tiny()
            .prepend(Lexicon::ROOT, Rule::words(&["if"], Category::Keyword))
            .finish();
        let root = lexicon.get_state(Lexicon::ROOT);
        assert_eq!(root.rules.len(), 2);
        assert_eq!(root.rules[0].category, Category::Keyword);
        assert_eq!(root.rules[0].matcher.match_len("if x"), Some(2));
    }

    #[test]
    #[should_panic]
    fn duplicate_state() {
        tiny().state(Lexicon::ROOT, vec![]);
    }

    #[test]
    #[should_panic]
    fn unknown_push_target() {
        Lexicon::new("Broken")
            .state(
                Lexicon::ROOT,
                vec![Rule::push("x", Category::Text, "nowhere")],
            )
            .finish();
    }

    #[test]
    #[should_panic]
    fn missing_root() {
        Lexicon::new("Rootless")
            .state("general", vec![])
            .finish();
    }
}
