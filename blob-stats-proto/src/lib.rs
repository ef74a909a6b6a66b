#![allow(clippy::derive_partial_eq_without_eq)]
pub mod blockscout {
    pub mod blob_stats {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/blockscout.blob_stats.v1.rs"));
        }
    }
}

pub mod grpc {
    pub mod health {
        pub mod v1 {
            include!(concat!(env!("OUT_DIR"), "/grpc.health.v1.rs"));
        }
    }
}

#[cfg(test)]
mod tests;
