use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::collections::HashMap;

use tracing::debug;

use super::managererror::{ManagerError, parse_json_value};


/// A registry of named objects loaded from JSON.
///
/// `S` carries whatever an object needs to be resolved while loading, e.g.
/// another manager it refers to.
pub trait IManager<V, S> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>>;

    fn map_mut(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            supports: &S) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self,
                                json_vec: &[serde_json::Value],
                                supports: &S) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone(), supports)?;
        }
        Ok(())
    }

    /// Loads either a single object or an array of objects from `json_str`.
    fn from_json_str(&self,
                     json_str: &str,
                     supports: &S) -> Result<(), ManagerError> {
        let json_value: serde_json::Value = serde_json::from_str(json_str)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array, supports)
        } else {
            self.insert_obj_from_json(json_value, supports)
        }
    }
}


/// A manager whose objects need nothing but their own JSON to be built.
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    /// `get_obj_from_json` returns the object together with the name it is
    /// registered under.
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V, ()> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, HashMap<String, V>> {
        self.map_cell.borrow()
    }

    fn map_mut(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let (name, v) = (self.get_obj_from_json)(json_value)?;
        debug!("Loaded object '{}'", name);
        self.map_mut().insert(name, v);
        Ok(())
    }
}
