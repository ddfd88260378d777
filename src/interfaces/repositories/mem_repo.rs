use crate::db::memory::MemStore;

#[derive(Clone)]
pub struct MemUserRepo {
    pub store: MemStore,
}

#[derive(Clone)]
pub struct MemSeekerProfileRepo {
    pub store: MemStore,
}

#[derive(Clone)]
pub struct MemEmployerProfileRepo {
    pub store: MemStore,
}

#[derive(Clone)]
pub struct MemJobRepo {
    pub store: MemStore,
}

#[derive(Clone)]
pub struct MemApplicationRepo {
    pub store: MemStore,
}
