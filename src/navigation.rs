//! Navegación entre pantallas
//!
//! El estado de la pantalla actual es un valor explícito que pertenece al
//! controlador de nivel superior. Las transiciones son funciones puras
//! `(estado, evento) -> estado` y son totales: no existe pantalla inválida.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Marketplace,
    Tracking,
    Documents,
    Checkout,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(Screen),
    /// Botón "Get Financing" de la cabecera
    GetFinancing,
    OpenMobileMenu,
    CloseMobileMenu,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavState {
    pub screen: Screen,
    pub mobile_menu_open: bool,
}

/// Entrada del menú de cabecera
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub screen: Screen,
}

pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem { name: "Home", screen: Screen::Home },
        NavItem { name: "Browse Vehicles", screen: Screen::Marketplace },
        NavItem { name: "Track Order", screen: Screen::Tracking },
        NavItem { name: "Documents", screen: Screen::Documents },
    ]
}

/// Toda navegación cierra el menú móvil
pub fn transition(state: NavState, event: NavEvent) -> NavState {
    match event {
        NavEvent::Navigate(screen) => NavState {
            screen,
            mobile_menu_open: false,
        },
        NavEvent::GetFinancing => NavState {
            screen: Screen::Checkout,
            mobile_menu_open: false,
        },
        NavEvent::OpenMobileMenu => NavState {
            mobile_menu_open: true,
            ..state
        },
        NavEvent::CloseMobileMenu => NavState {
            mobile_menu_open: false,
            ..state
        },
    }
}

/// Controlador dueño del estado de navegación (último en escribir gana)
#[derive(Debug, Default)]
pub struct NavController {
    state: NavState,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn dispatch(&mut self, event: NavEvent) -> NavState {
        self.state = transition(self.state, event);
        self.state
    }

    /// ¿Debe resaltarse esta entrada del menú?
    pub fn is_active(&self, item: &NavItem) -> bool {
        self.state.screen == item.screen
    }
}
