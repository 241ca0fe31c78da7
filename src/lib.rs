pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod case_information {
        pub mod core {
            pub mod information;
            pub mod query;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_information {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_information {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_information {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_information {
                pub mod handler;
                pub mod latest;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_information {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod failure;
                pub mod information_input;
                pub mod information_view;
            }
            pub mod mappers {
                pub mod information_row_mapper;
            }
            pub mod outbound {
                pub mod command_gateway;
                pub mod command_gateway_in_memory;
                pub mod information_row;
            }
        }
    }
}

pub mod shell;
