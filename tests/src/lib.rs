//! # Switchboard Test Suite
//!
//! Unified test crate for behavior that spans more than one crate.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── bus_benchmarks.rs   # Fan-out and request/reply cost
//! └── src/integration/
//!     ├── bootstrap_order.rs  # Init order is observable
//!     ├── fan_out.rs          # Delivery order, snapshot and failure rules
//!     ├── shop_flows.rs       # Auth + Catalog over the bus
//!     └── runtime_flows.rs    # Config files and session scripts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sb-tests
//!
//! # By area
//! cargo test -p sb-tests integration::shop_flows::
//!
//! # Benchmarks
//! cargo bench -p sb-tests
//! ```
