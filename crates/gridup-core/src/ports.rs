use std::sync::atomic::{AtomicU16, Ordering};

/// Process-wide source of unique ports for concurrently starting services.
pub trait PortAllocator: Send + Sync {
    /// Hand out a port this allocator has not handed out before.
    fn allocate(&self) -> u16;
}

/// Monotonic in-process port allocator.
///
/// Share one instance across all services of a session; ports are unique
/// per instance.
pub struct UniquePorts {
    next: AtomicU16,
}

impl UniquePorts {
    /// First port handed out by [`UniquePorts::new`].
    pub const FIRST_PORT: u16 = 50_000;

    pub fn new() -> Self {
        Self::starting_at(Self::FIRST_PORT)
    }

    pub fn starting_at(port: u16) -> Self {
        Self {
            next: AtomicU16::new(port),
        }
    }
}

impl Default for UniquePorts {
    fn default() -> Self {
        Self::new()
    }
}

impl PortAllocator for UniquePorts {
    fn allocate(&self) -> u16 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::{PortAllocator, UniquePorts};

    #[test]
    fn ports_are_sequential_from_base() {
        let ports = UniquePorts::starting_at(40_000);
        assert_eq!(ports.allocate(), 40_000);
        assert_eq!(ports.allocate(), 40_001);
        assert_eq!(ports.allocate(), 40_002);
    }

    #[test]
    fn ports_are_unique_across_threads() {
        let ports = Arc::new(UniquePorts::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ports = Arc::clone(&ports);
                std::thread::spawn(move || (0..64).map(|_| ports.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for port in handle.join().unwrap() {
                assert!(seen.insert(port), "port {port} handed out twice");
            }
        }
        assert_eq!(seen.len(), 8 * 64);
    }
}
