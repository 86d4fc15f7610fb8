pub mod config {
    pub mod settings;
}
pub mod middleware {
    pub mod dispatch;
    pub mod safety_net;
}
pub mod routes {
    pub mod health;
    pub mod v1;
}
pub mod services {
    pub mod interactor;
    pub mod health {
        pub mod status;
    }
}
pub mod utils {
    pub mod errors;
    pub mod types;
}
