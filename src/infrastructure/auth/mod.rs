mod firebase_auth_provider;

pub use firebase_auth_provider::FirebaseAuthProvider;
