use crate::domain::variables::{Variables, names};

/// Admin password written to `custom.cfg` when `PASSWORD` is blank.
pub const DEFAULT_PASSWORD: &str = "admin";

/// Buildout manifest inputs collected from the variable source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildoutSettings {
    pub find_links: Vec<String>,
    pub eggs: Vec<String>,
    pub zcml: Vec<String>,
    pub develop: Vec<String>,
    pub site: Option<String>,
    pub profiles: Vec<String>,
    pub versions: Vec<String>,
    pub sources: Vec<String>,
    pub password: Option<String>,
}

fn words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `plone.app.foo=1.2` installs the `plone.app.foo:default` profile.
pub fn default_profile(egg: &str) -> String {
    let base = egg.split('=').next().unwrap_or(egg);
    format!("{base}:default")
}

impl BuildoutSettings {
    /// Collect settings, or `None` when there is nothing worth a `custom.cfg`
    /// (no eggs, zcml, develop packages, site or password).
    pub fn from_variables(vars: &Variables) -> Option<Self> {
        let eggs = words(vars.with_legacy(names::ADDONS));
        let mut profiles = words(vars.with_legacy(names::PROFILES));
        if profiles.is_empty() {
            profiles = eggs.iter().map(|egg| default_profile(egg)).collect();
        }

        let settings = Self {
            find_links: words(vars.get_or(names::FIND_LINKS, "")),
            zcml: words(vars.with_legacy(names::ZCML)),
            develop: words(vars.with_legacy(names::DEVELOP)),
            site: non_blank(vars.with_legacy(names::SITE)),
            versions: words(vars.with_legacy(names::VERSIONS)),
            sources: vars
                .get_or(names::SOURCES, "")
                .trim()
                .split(',')
                .map(str::to_string)
                .collect(),
            password: non_blank(vars.get_or(names::PASSWORD, "")),
            eggs,
            profiles,
        };

        let has_content = !settings.eggs.is_empty()
            || !settings.zcml.is_empty()
            || !settings.develop.is_empty()
            || settings.site.is_some()
            || settings.password.is_some();
        has_content.then_some(settings)
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_default_profiles_from_eggs() {
        let vars = Variables::from_iter([("PLONE_ADDONS", "foo.bar=1.0 baz.qux")]);
        let settings = BuildoutSettings::from_variables(&vars).unwrap();
        assert_eq!(settings.eggs, vec!["foo.bar=1.0", "baz.qux"]);
        assert_eq!(settings.profiles, vec!["foo.bar:default", "baz.qux:default"]);
    }

    #[test]
    fn explicit_profiles_win_over_derived_ones() {
        let vars = Variables::from_iter([
            ("PLONE_ADDONS", "foo.bar"),
            ("PLONE_PROFILES", "foo.bar:testing"),
        ]);
        let settings = BuildoutSettings::from_variables(&vars).unwrap();
        assert_eq!(settings.profiles, vec!["foo.bar:testing"]);
    }

    #[test]
    fn legacy_names_are_honored() {
        let vars = Variables::from_iter([
            ("ADDONS", "senaite.app.listing"),
            ("ZCML", "senaite.app.listing-meta"),
            ("DEVELOP", "src/senaite.core"),
            ("SITE", "senaite"),
            ("VERSIONS", "senaite.core=2.5.0 Products.CMFCore=2.7.0"),
        ]);
        let settings = BuildoutSettings::from_variables(&vars).unwrap();
        assert_eq!(settings.eggs, vec!["senaite.app.listing"]);
        assert_eq!(settings.zcml, vec!["senaite.app.listing-meta"]);
        assert_eq!(settings.develop, vec!["src/senaite.core"]);
        assert_eq!(settings.site.as_deref(), Some("senaite"));
        assert_eq!(settings.versions, vec!["senaite.core=2.5.0", "Products.CMFCore=2.7.0"]);
    }

    #[test]
    fn nothing_to_configure_without_trigger_variables() {
        let vars = Variables::from_iter([
            ("FIND_LINKS", "https://dist.example/simple"),
            ("PLONE_VERSIONS", "senaite.core=2.5.0"),
            ("SOURCES", "senaite.core = git https://github.com/senaite/senaite.core"),
            ("PASSWORD", "   "),
        ]);
        assert_eq!(BuildoutSettings::from_variables(&vars), None);
    }

    #[test]
    fn password_alone_is_enough() {
        let vars = Variables::from_iter([("PASSWORD", "secret")]);
        let settings = BuildoutSettings::from_variables(&vars).unwrap();
        assert_eq!(settings.password(), "secret");
        assert!(settings.profiles.is_empty());
    }

    #[test]
    fn sources_split_on_commas_only() {
        let vars = Variables::from_iter([
            ("SITE", "lims"),
            ("SOURCES", "a = git https://a, b = git https://b"),
        ]);
        let settings = BuildoutSettings::from_variables(&vars).unwrap();
        assert_eq!(settings.sources, vec!["a = git https://a", " b = git https://b"]);
        assert_eq!(settings.password(), DEFAULT_PASSWORD);
    }
}
