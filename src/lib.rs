pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod remote_collection;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod identity;
            pub mod policy;
            pub mod ports;
            pub mod reconcile;
            pub mod record;
            pub mod student;
        }
        pub mod application {
            pub mod attendance_service;
            pub mod errors;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod remote_repository;
            }
        }
    }
}

pub mod shell;
