use avsupnp::define_variable;

// Liste des IDs de connexion actifs, "0" tant qu'aucune connexion n'est suivie.
define_variable! {
    pub static CURRENTCONNECTIONIDS: String = "CurrentConnectionIDs" {
        default: "0",
        evented: true,
    }
}
