use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    PatientInfo,
    Monitoring,
    Search,
    Routine,
}

impl Page {
    pub const CARDS: [Page; 4] = [Page::PatientInfo, Page::Monitoring, Page::Search, Page::Routine];

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Page::Home),
            "/patient-info" => Some(Page::PatientInfo),
            "/monitoring" => Some(Page::Monitoring),
            "/search" => Some(Page::Search),
            "/routine" => Some(Page::Routine),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::PatientInfo => "/patient-info",
            Page::Monitoring => "/monitoring",
            Page::Search => "/search",
            Page::Routine => "/routine",
        }
    }

    /// Navbar title. Home shows the product name.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "SIGMA",
            Page::PatientInfo => "Informações do Paciente",
            Page::Monitoring => "Monitoramento",
            Page::Search => "Procura",
            Page::Routine => "Rotina",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Sistema Integrado de Gerenciamento e Monitoramento Assistencial",
            Page::PatientInfo => "Gerenciar dados e informações do paciente",
            Page::Monitoring => "Visualizar câmera e monitorar o paciente",
            Page::Search => "Pesquisar ações do paciente no banco de dados",
            Page::Routine => "Programar médico, dieta e exercícios",
        }
    }

    pub fn show_navbar(&self) -> bool {
        *self != Page::Home
    }
}

/// Title for an arbitrary path; unknown paths fall back to the product name.
pub fn page_title(path: &str) -> &'static str {
    Page::from_path(path).unwrap_or(Page::Home).title()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationCard {
    pub title: String,
    pub path: String,
    pub description: String,
}

impl From<Page> for NavigationCard {
    fn from(page: Page) -> Self {
        Self {
            title: page.title().to_string(),
            path: page.path().to_string(),
            description: page.description().to_string(),
        }
    }
}
