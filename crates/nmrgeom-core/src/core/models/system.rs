use super::atom::AtomSite;
use super::error::ModelError;
use crate::core::coupling::jcoupling;
use nalgebra::Matrix3;
use std::collections::HashMap;

/// A collection of nuclear sites with label lookup.
///
/// The system owns its sites; every engine operation only borrows them. Site indices are
/// dense, assigned in insertion order, and stable for the lifetime of the system.
#[derive(Debug, Clone, Default)]
pub struct SpinSystem {
    /// Sites in insertion order; `sites[i].index == i`.
    sites: Vec<AtomSite>,
    /// Lookup map from crystallographic label to site index.
    label_map: HashMap<String, usize>,
}

impl SpinSystem {
    /// Creates a new, empty spin system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a site and returns the index assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateLabel`] if a site with the same label exists.
    pub fn add_site(&mut self, mut site: AtomSite) -> Result<usize, ModelError> {
        if self.label_map.contains_key(&site.label) {
            return Err(ModelError::DuplicateLabel(site.label));
        }
        let index = self.sites.len();
        site.index = index;
        self.label_map.insert(site.label.clone(), index);
        self.sites.push(site);
        Ok(index)
    }

    /// Retrieves a site by its index.
    pub fn site(&self, index: usize) -> Option<&AtomSite> {
        self.sites.get(index)
    }

    /// Retrieves a site by its label.
    pub fn site_by_label(&self, label: &str) -> Option<&AtomSite> {
        self.label_map.get(label).and_then(|&i| self.sites.get(i))
    }

    /// Stores the raw ISC tensor for the ordered pair (`a`, `b`) on site `a`.
    ///
    /// Only the `a → b` direction is stored; magres data normally lists both directions
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SiteIndexOutOfRange`] if either index is unknown.
    pub fn set_isc(&mut self, a: usize, b: usize, tensor: Matrix3<f64>) -> Result<(), ModelError> {
        if b >= self.sites.len() {
            return Err(ModelError::SiteIndexOutOfRange(b));
        }
        let site = self
            .sites
            .get_mut(a)
            .ok_or(ModelError::SiteIndexOutOfRange(a))?;
        site.isc.insert(b, tensor);
        Ok(())
    }

    /// Isotropic J-coupling in Hz for the ordered pair (`a`, `b`), or `Ok(None)` when no
    /// ISC tensor was stored for it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SiteIndexOutOfRange`] if either index is unknown.
    pub fn j_coupling(&self, a: usize, b: usize) -> Result<Option<f64>, ModelError> {
        let site_a = self.site(a).ok_or(ModelError::SiteIndexOutOfRange(a))?;
        let site_b = self.site(b).ok_or(ModelError::SiteIndexOutOfRange(b))?;
        Ok(jcoupling::j_coupling(site_a, site_b))
    }

    /// Returns an iterator over all sites in index order.
    pub fn sites_iter(&self) -> impl Iterator<Item = &AtomSite> {
        self.sites.iter()
    }

    pub fn sites(&self) -> &[AtomSite] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Isotope;
    use nalgebra::Point3;

    fn site(label: &str) -> AtomSite {
        AtomSite::new(label, Point3::origin(), Isotope::new("1H", Some(267522128.0)))
    }

    #[test]
    fn add_site_assigns_dense_indices() {
        let mut system = SpinSystem::new();
        assert_eq!(system.add_site(site("H1")), Ok(0));
        assert_eq!(system.add_site(site("H2")), Ok(1));
        assert_eq!(system.len(), 2);
        assert_eq!(system.site(1).unwrap().index, 1);
        assert_eq!(system.site(1).unwrap().label, "H2");
    }

    #[test]
    fn add_site_rejects_duplicate_labels() {
        let mut system = SpinSystem::new();
        system.add_site(site("H1")).unwrap();
        assert_eq!(
            system.add_site(site("H1")),
            Err(ModelError::DuplicateLabel("H1".to_string()))
        );
        assert_eq!(system.len(), 1);
    }

    #[test]
    fn site_by_label_finds_sites() {
        let mut system = SpinSystem::new();
        system.add_site(site("O1")).unwrap();
        system.add_site(site("H1")).unwrap();

        assert_eq!(system.site_by_label("H1").map(|s| s.index), Some(1));
        assert!(system.site_by_label("C1").is_none());
    }

    #[test]
    fn set_isc_stores_one_direction_only() {
        let mut system = SpinSystem::new();
        system.add_site(site("H1")).unwrap();
        system.add_site(site("H2")).unwrap();

        system.set_isc(0, 1, Matrix3::identity()).unwrap();

        assert!(system.site(0).unwrap().isc_with(1).is_some());
        assert!(system.site(1).unwrap().isc_with(0).is_none());
    }

    #[test]
    fn set_isc_checks_both_indices() {
        let mut system = SpinSystem::new();
        system.add_site(site("H1")).unwrap();

        assert_eq!(
            system.set_isc(0, 5, Matrix3::identity()),
            Err(ModelError::SiteIndexOutOfRange(5))
        );
        assert_eq!(
            system.set_isc(4, 0, Matrix3::identity()),
            Err(ModelError::SiteIndexOutOfRange(4))
        );
    }

    #[test]
    fn j_coupling_resolves_sites_by_index() {
        let mut system = SpinSystem::new();
        system.add_site(site("H1")).unwrap();
        system.add_site(site("H2")).unwrap();
        system.set_isc(0, 1, Matrix3::identity()).unwrap();

        let j = system.j_coupling(0, 1).unwrap().unwrap();
        assert!((j - 12.012010777033503).abs() < 1e-9);
        assert_eq!(system.j_coupling(1, 0), Ok(None));
        assert_eq!(
            system.j_coupling(0, 2),
            Err(ModelError::SiteIndexOutOfRange(2))
        );
    }

    #[test]
    fn empty_system_reports_empty() {
        let system = SpinSystem::new();
        assert!(system.is_empty());
        assert_eq!(system.sites_iter().count(), 0);
        assert!(system.sites().is_empty());
    }
}
