//! In-memory catalog store for tests and doc examples.
//!
//! Each table is an id-keyed `BTreeMap` with its own sequence, so iteration
//! order is id ascending. Relations are plain FK fields checked on write.
//! All tables sit behind one `RwLock`, which makes cascades atomic.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use configs::NameMatch;
use models::{owner, property, property_image, property_trace};
use tokio::sync::RwLock;

use crate::domain::{OwnerInput, PropertyImageInput, PropertyImageUpdate, PropertyInput, PropertyTraceInput};
use crate::errors::ServiceError;
use crate::owner::OwnerRepository;
use crate::property::{PropertyFilter, PropertyRepository};
use crate::property_image::PropertyImageRepository;
use crate::property_trace::PropertyTraceRepository;

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn select(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| pred(r)).cloned().collect()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: BTreeMap::new(), last_id: 0 }
    }
}

#[derive(Default)]
struct Tables {
    owners: Table<owner::Model>,
    properties: Table<property::Model>,
    images: Table<property_image::Model>,
    traces: Table<property_trace::Model>,
}

impl Tables {
    fn require_owner(&self, id: i32) -> Result<(), ServiceError> {
        if self.owners.rows.contains_key(&id) { Ok(()) } else { Err(ServiceError::missing_parent("owner", id)) }
    }

    fn require_property(&self, id: i32) -> Result<(), ServiceError> {
        if self.properties.rows.contains_key(&id) { Ok(()) } else { Err(ServiceError::missing_parent("property", id)) }
    }

    fn purge_children(&mut self, property_ids: &BTreeSet<i32>) {
        self.images.rows.retain(|_, img| !property_ids.contains(&img.property_id));
        self.traces.rows.retain(|_, tr| !property_ids.contains(&tr.property_id));
    }
}

#[derive(Default)]
pub struct MemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for MemoryCatalogStore {
    async fn list_owners(&self) -> Result<Vec<owner::Model>, ServiceError> {
        Ok(self.tables.read().await.owners.values())
    }

    async fn get_owner(&self, id: i32) -> Result<Option<owner::Model>, ServiceError> {
        Ok(self.tables.read().await.owners.rows.get(&id).cloned())
    }

    async fn insert_owner(&self, input: OwnerInput, photo: Option<Vec<u8>>) -> Result<owner::Model, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.owners.insert_with(|id| input.to_model(id, photo)))
    }

    async fn update_owner(&self, id: i32, input: &OwnerInput) -> Result<Option<owner::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.owners.rows.get_mut(&id).map(|row| {
            input.apply_to(row);
            row.clone()
        }))
    }

    async fn replace_owner_photo(&self, id: i32, photo: Option<Vec<u8>>) -> Result<Option<owner::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.owners.rows.get_mut(&id).map(|row| {
            row.photo = photo;
            row.clone()
        }))
    }

    async fn delete_owner(&self, id: i32) -> Result<bool, ServiceError> {
        let mut t = self.tables.write().await;
        if t.owners.rows.remove(&id).is_none() {
            return Ok(false);
        }
        let owned: BTreeSet<i32> = t.properties.rows.values().filter(|p| p.owner_id == id).map(|p| p.id).collect();
        t.purge_children(&owned);
        t.properties.rows.retain(|pid, _| !owned.contains(pid));
        Ok(true)
    }
}

#[async_trait]
impl PropertyRepository for MemoryCatalogStore {
    async fn list_properties(&self) -> Result<Vec<property::Model>, ServiceError> {
        Ok(self.tables.read().await.properties.values())
    }

    async fn get_property(&self, id: i32) -> Result<Option<property::Model>, ServiceError> {
        Ok(self.tables.read().await.properties.rows.get(&id).cloned())
    }

    async fn insert_property(&self, input: PropertyInput) -> Result<property::Model, ServiceError> {
        let mut t = self.tables.write().await;
        t.require_owner(input.owner_id)?;
        Ok(t.properties.insert_with(|id| input.to_model(id)))
    }

    async fn update_property(&self, id: i32, input: &PropertyInput) -> Result<Option<property::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        if !t.properties.rows.contains_key(&id) {
            return Ok(None);
        }
        t.require_owner(input.owner_id)?;
        Ok(t.properties.rows.get_mut(&id).map(|row| {
            input.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_property(&self, id: i32) -> Result<bool, ServiceError> {
        let mut t = self.tables.write().await;
        if t.properties.rows.remove(&id).is_none() {
            return Ok(false);
        }
        t.purge_children(&BTreeSet::from([id]));
        Ok(true)
    }

    async fn list_properties_by_owner(&self, owner_id: i32) -> Result<Vec<property::Model>, ServiceError> {
        Ok(self.tables.read().await.properties.select(|p| p.owner_id == owner_id))
    }

    async fn filter_properties(&self, filter: &PropertyFilter, mode: NameMatch) -> Result<Vec<property::Model>, ServiceError> {
        Ok(self.tables.read().await.properties.select(|p| filter.matches(p, mode)))
    }
}

#[async_trait]
impl PropertyImageRepository for MemoryCatalogStore {
    async fn list_images(&self) -> Result<Vec<property_image::Model>, ServiceError> {
        Ok(self.tables.read().await.images.values())
    }

    async fn get_image(&self, id: i32) -> Result<Option<property_image::Model>, ServiceError> {
        Ok(self.tables.read().await.images.rows.get(&id).cloned())
    }

    async fn insert_image(&self, input: PropertyImageInput, file: Option<Vec<u8>>) -> Result<property_image::Model, ServiceError> {
        let mut t = self.tables.write().await;
        t.require_property(input.property_id)?;
        Ok(t.images.insert_with(|id| input.to_model(id, file)))
    }

    async fn update_image(&self, id: i32, update: PropertyImageUpdate) -> Result<Option<property_image::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.images.rows.get_mut(&id).map(|row| {
            update.apply_to(row);
            row.clone()
        }))
    }

    async fn replace_image_file(&self, id: i32, file: Option<Vec<u8>>) -> Result<Option<property_image::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        Ok(t.images.rows.get_mut(&id).map(|row| {
            row.file = file;
            row.clone()
        }))
    }

    async fn delete_image(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables.write().await.images.rows.remove(&id).is_some())
    }

    async fn list_images_by_property(&self, property_id: i32) -> Result<Vec<property_image::Model>, ServiceError> {
        Ok(self.tables.read().await.images.select(|i| i.property_id == property_id))
    }
}

#[async_trait]
impl PropertyTraceRepository for MemoryCatalogStore {
    async fn list_traces(&self) -> Result<Vec<property_trace::Model>, ServiceError> {
        Ok(self.tables.read().await.traces.values())
    }

    async fn get_trace(&self, id: i32) -> Result<Option<property_trace::Model>, ServiceError> {
        Ok(self.tables.read().await.traces.rows.get(&id).cloned())
    }

    async fn insert_trace(&self, input: PropertyTraceInput) -> Result<property_trace::Model, ServiceError> {
        let mut t = self.tables.write().await;
        t.require_property(input.property_id)?;
        Ok(t.traces.insert_with(|id| input.to_model(id)))
    }

    async fn update_trace(&self, id: i32, input: &PropertyTraceInput) -> Result<Option<property_trace::Model>, ServiceError> {
        let mut t = self.tables.write().await;
        if !t.traces.rows.contains_key(&id) {
            return Ok(None);
        }
        t.require_property(input.property_id)?;
        Ok(t.traces.rows.get_mut(&id).map(|row| {
            input.apply_to(row);
            row.clone()
        }))
    }

    async fn delete_trace(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables.write().await.traces.rows.remove(&id).is_some())
    }

    async fn list_traces_by_property(&self, property_id: i32) -> Result<Vec<property_trace::Model>, ServiceError> {
        Ok(self.tables.read().await.traces.select(|t| t.property_id == property_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn owner_input() -> OwnerInput {
        OwnerInput { name: "O".into(), address: "A".into(), birthday: NaiveDate::from_ymd_opt(1975, 8, 15).unwrap() }
    }

    fn property_input(owner_id: i32) -> PropertyInput {
        PropertyInput { name: "P".into(), address: "A".into(), price: 1, code_internal: "C".into(), year: 2000, owner_id }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_sequence_and_never_reused() {
        let store = MemoryCatalogStore::new();
        let a = store.insert_owner(owner_input(), None).await.unwrap();
        let b = store.insert_owner(owner_input(), None).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(store.delete_owner(b.id).await.unwrap());
        let c = store.insert_owner(owner_input(), None).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let store = MemoryCatalogStore::new();
        let err = store.insert_property(property_input(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
        assert!(store.list_properties().await.unwrap().is_empty());

        let err = store.insert_image(PropertyImageInput { property_id: 1, enabled: true }, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn cascade_leaves_siblings_alone() {
        let store = MemoryCatalogStore::new();
        let gone = store.insert_owner(owner_input(), None).await.unwrap();
        let kept = store.insert_owner(owner_input(), None).await.unwrap();
        let p1 = store.insert_property(property_input(gone.id)).await.unwrap();
        let p2 = store.insert_property(property_input(kept.id)).await.unwrap();
        store.insert_image(PropertyImageInput { property_id: p1.id, enabled: true }, None).await.unwrap();
        store.insert_image(PropertyImageInput { property_id: p2.id, enabled: true }, None).await.unwrap();

        assert!(store.delete_owner(gone.id).await.unwrap());
        assert_eq!(store.list_properties().await.unwrap(), vec![p2.clone()]);
        let images = store.list_images().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].property_id, p2.id);
    }
}
