//! Pages & Paths
//!
//! The site's fixed page table. Every path maps to exactly one page; anything
//! unknown lands on the home page.

/// Site pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Props,
    State,
    Lifecycle,
    Hooks,
    VirtualDom,
    Redux,
}

/// Home page card for a concept page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Props,
        Page::State,
        Page::Lifecycle,
        Page::Hooks,
        Page::VirtualDom,
        Page::Redux,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Props => "/props",
            Page::State => "/state",
            Page::Lifecycle => "/lifecycle",
            Page::Hooks => "/hooks",
            Page::VirtualDom => "/virtual-dom",
            Page::Redux => "/redux",
        }
    }

    /// Resolve a path; a trailing slash is ignored
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Page::ALL
            .into_iter()
            .find(|page| page.path() == normalized)
            .unwrap_or_default()
    }

    /// Resolve a location hash such as `#/props`
    pub fn from_hash(hash: &str) -> Page {
        Page::from_path(hash.trim_start_matches('#'))
    }

    /// Hash fragment pointing at this page
    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Props => "Props",
            Page::State => "State",
            Page::Lifecycle => "Ciclo de Vida",
            Page::Hooks => "Hooks",
            Page::VirtualDom => "Virtual DOM",
            Page::Redux => "Redux",
        }
    }

    /// Card shown on the home page; the home page has none
    pub fn card(self) -> Option<FeatureCard> {
        let (icon, title, text) = match self {
            Page::Home => return None,
            Page::Props => ("🔧", "Props", "Aprende cómo pasar información entre componentes usando propiedades."),
            Page::State => ("📊", "Estado", "Manejo de estados locales y su actualización en componentes."),
            Page::Lifecycle => ("🔄", "Ciclo de Vida", "Comprende las fases de los componentes y su equivalente en efectos."),
            Page::Hooks => ("🪝", "Hooks", "Explora el estado local, los efectos y los temporizadores."),
            Page::VirtualDom => ("🌐", "Virtual DOM", "Descubre cómo funciona y sus ventajas frente al DOM tradicional."),
            Page::Redux => ("🗂️", "Redux", "Gestión de estado global con store, actions y reducers."),
        };
        Some(FeatureCard { icon, title, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
            assert_eq!(Page::from_hash(&page.hash()), page);
        }
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn test_unknown_and_empty_go_home() {
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/nope"), Page::Home);
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#"), Page::Home);
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Page::from_path("/virtual-dom/"), Page::VirtualDom);
        assert_eq!(Page::from_hash("#/redux/"), Page::Redux);
    }

    #[test]
    fn test_every_concept_page_has_a_card() {
        assert!(Page::Home.card().is_none());
        let cards = Page::ALL.into_iter().filter_map(Page::card).count();
        assert_eq!(cards, 6);
    }
}
