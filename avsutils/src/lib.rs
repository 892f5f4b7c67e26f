/// Utilitaires pour la gestion des adresses IP réseau.
///
/// Ce module fournit des fonctions pour détecter et lister les adresses IP
/// des interfaces réseau locales de la machine.
///
/// # Fonctions principales
///
/// - [`guess_local_ip`] : Devine l'adresse IP locale utilisée pour les connexions sortantes
mod ip_utils;
mod process;

pub use ip_utils::guess_local_ip;
pub use process::{find_process_using_port, ProcessPortInfo, TransportProtocol};

use xmltree::Element;

/// Implemented by types that render themselves to an `xmltree::Element`,
/// rather than going through serde's XML (de)serialization path. Used for
/// DIDL-Lite, where attribute/child ordering and omission rules are too
/// irregular for a derive to express cleanly.
pub trait ToXmlElement {
    fn to_xml_element(&self) -> Element;
}
