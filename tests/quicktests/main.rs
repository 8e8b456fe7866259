//! Property tests against the public API of `avltree`.

mod tree;
