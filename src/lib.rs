// Crate entry point. Declares the module tree so the binary and tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No client logic here.

pub mod modules {
    pub mod entries {
        pub mod core {
            pub mod entry;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod submit_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod list_entries {
                pub mod handler;
                pub mod projection;
            }
            pub mod identify_caller {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_backend;
                pub mod in_memory_backend;
            }
        }
    }
}

pub mod shell;
