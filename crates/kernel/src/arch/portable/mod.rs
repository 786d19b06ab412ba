// Copyright 2023-2024 Irreducible Inc.

pub(crate) mod scalar;
