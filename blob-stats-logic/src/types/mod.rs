mod blobs;

pub use blobs::{
    BlobBaseView, BlobOnTransactionView, BlobTransactionView, BlobView, BlockView,
    DataStorageReference, TransactionView,
};
